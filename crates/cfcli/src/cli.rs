//! Command-line surface
//!
//! Flag names and defaults follow the Cloudflare "DNS Records for a Zone"
//! API parameters one to one. Every string flag defaults to empty, which the
//! request builder treats as "not supplied".

use clap::{Args, Parser, Subcommand};

const ZONE_ID_HELP: &str = "Identifier, <= 32 characters, Eg. 023e105f4ecef8ad9ca31a8372d0c353";

macro_rules! record_notes {
    ($verb:literal) => {
        concat!(
            $verb,
            " an existing DNS record. Notes:\n",
            "A/AAAA records cannot exist on the same name as CNAME records.\n",
            "NS records cannot exist on the same name as any other record type.\n",
            "Domain names are always represented in Punycode, even if Unicode characters were used when creating the record."
        )
    };
}

/// Cloudflare DNS Records for a Zone shell
#[derive(Parser, Debug)]
#[command(name = "cf-cli")]
#[command(version = "0.0.1")]
#[command(about = "Cloudflare DNS Records for a Zone shell", long_about = None)]
#[command(override_usage = "cf-cli COMMAND [OPTIONS]")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Setup security configuration, Eg. 'X-Auth-Email', 'X-Auth-Key'
    #[command(visible_alias = "init")]
    Setup(SetupArgs),

    /// List, search, sort, and filter a zones' DNS records.
    List(ListArgs),

    /// Create a new DNS record for a zone.
    Create {
        #[command(subcommand)]
        record: NewRecord,
    },

    /// You can export your BIND config through this endpoint.
    Export(ZoneArgs),

    /// Scan for common DNS records on your domain and automatically add them to your zone. Useful if you haven't updated your nameservers yet.
    Scan(ZoneArgs),

    /// Delete DNS Record
    Delete(RecordIdArgs),

    /// DNS Record Details
    Details(RecordIdArgs),

    #[command(
        about = "Update an existing DNS record. Notes: A/AAAA records cannot exist on the same name as CNAME records.",
        long_about = record_notes!("Update")
    )]
    Update {
        #[command(subcommand)]
        record: ExistingRecord,
    },

    #[command(
        about = "Overwrite an existing DNS record. Notes: A/AAAA records cannot exist on the same name as CNAME records.",
        long_about = record_notes!("Overwrite")
    )]
    Overwrite {
        #[command(subcommand)]
        record: ExistingRecord,
    },
}

/// Record subtype selector for create
#[derive(Subcommand, Debug)]
pub enum NewRecord {
    /// A record (IPv4)
    #[command(name = "A", visible_alias = "a")]
    A(RecordArgs),

    /// AAAA record (IPv6)
    #[command(name = "AAAA", visible_alias = "aaaa")]
    Aaaa(RecordArgs),
}

/// Record subtype selector for update and overwrite
#[derive(Subcommand, Debug)]
pub enum ExistingRecord {
    /// A record (IPv4)
    #[command(name = "A", visible_alias = "a")]
    A(ExistingRecordArgs),

    /// AAAA record (IPv6)
    #[command(name = "AAAA", visible_alias = "aaaa")]
    Aaaa(ExistingRecordArgs),
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Cloudflare auth email
    #[arg(long, default_value = "")]
    pub x_auth_email: String,

    /// Cloudflare auth key
    #[arg(long, default_value = "")]
    pub x_auth_key: String,

    /// Cloudflare API token
    #[arg(long, default_value = "")]
    pub api_token: String,
}

#[derive(Args, Debug, Clone)]
pub struct ZoneArgs {
    #[arg(long, default_value = "", help = ZONE_ID_HELP)]
    pub zone_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct RecordIdArgs {
    #[arg(long, default_value = "", help = ZONE_ID_HELP)]
    pub zone_id: String,

    /// Identifier, <= 32 characters, Eg. 023e105f4ecef8ad9ca31a8372d0c353
    #[arg(long, default_value = "")]
    pub record_id: String,
}

#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[arg(long, default_value = "", help = ZONE_ID_HELP)]
    pub zone_id: String,

    /// A valid IPv4 address (A) or IPv6 address (AAAA).
    #[arg(long, default_value = "")]
    pub content: String,

    /// DNS record name (or @ for the zone apex) in Punycode.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Whether the record is receiving the performance and security benefits of Cloudflare.
    #[arg(long)]
    pub proxied: bool,

    /// Comments or notes about the DNS record. This field has no effect on DNS responses.
    #[arg(long, default_value = "")]
    pub comment: String,

    /// Custom tags for the DNS record. This field has no effect on DNS responses.
    #[arg(long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Time To Live (TTL) of the DNS record in seconds. Setting to 1 means 'automatic'. Value must be between 60 and 86400, with the minimum reduced to 30 for Enterprise zones.
    #[arg(long, default_value_t = 0)]
    pub ttl: u64,
}

#[derive(Args, Debug, Clone)]
pub struct ExistingRecordArgs {
    /// Identifier, <= 32 characters, Eg. 023e105f4ecef8ad9ca31a8372d0c353
    #[arg(long, default_value = "")]
    pub record_id: String,

    #[command(flatten)]
    pub record: RecordArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    #[arg(long, default_value = "", help = ZONE_ID_HELP)]
    pub zone_id: String,

    /// Exact value of the DNS record comment. Comment filters are case-insensitive. Eg. Hello, world
    #[arg(long, default_value = "")]
    pub comment_exact: String,

    /// If this parameter is present, only records without a comment are returned.
    #[arg(long, default_value = "")]
    pub comment_absent: String,

    /// Substring of the DNS record comment. Comment filters are case-insensitive. Eg. ello, worl
    #[arg(long, default_value = "")]
    pub comment_contains: String,

    /// Suffix of the DNS record comment. Comment filters are case-insensitive. Eg. o, world
    #[arg(long, default_value = "")]
    pub comment_endswith: String,

    /// If this parameter is present, only records with a comment are returned.
    #[arg(long, default_value = "")]
    pub comment_present: String,

    /// Prefix of the DNS record comment. Comment filters are case-insensitive. Eg. Hello, w
    #[arg(long, default_value = "")]
    pub comment_startswith: String,

    /// DNS record content. Eg. 127.0.0.1
    #[arg(long, default_value = "")]
    pub content: String,

    /// Direction to order DNS records in. Allowed values: asc, desc
    #[arg(long, default_value = "asc")]
    pub direction: String,

    /// Whether to match all search requirements or at least one (any). Allowed values: any, all
    #[arg(long = "match", default_value = "all")]
    pub match_: String,

    /// DNS record name (or @ for the zone apex) in Punycode. Eg. example.com
    #[arg(long, default_value = "")]
    pub name: String,

    /// Field to order DNS records by. Allowed values: type, name, content, ttl, proxied
    #[arg(long, default_value = "type")]
    pub order: String,

    /// Page number of paginated results.
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Number of DNS records per page. Eg. 5
    #[arg(long, default_value_t = 100)]
    pub per_page: u32,

    /// Whether the record is receiving the performance and security benefits of Cloudflare.
    #[arg(long)]
    pub proxied: bool,

    /// Allows searching in multiple properties of a DNS record simultaneously. Eg. www.cloudflare.com
    #[arg(long, default_value = "")]
    pub search: String,

    /// Condition on the DNS record tag. Eg. team:DNS
    #[arg(long, default_value = "")]
    pub tag: String,

    /// Name of a tag which must not be present on the DNS record. Tag filters are case-insensitive. Eg. important
    #[arg(long, default_value = "")]
    pub tag_absent: String,

    /// A tag and value, of the form <tag-name>:<tag-value>, whose value contains <tag-value>. Tag filters are case-insensitive.
    #[arg(long, default_value = "")]
    pub tag_contains: String,

    /// A tag and value, of the form <tag-name>:<tag-value>, whose value ends with <tag-value>. Tag filters are case-insensitive.
    #[arg(long, default_value = "")]
    pub tag_endswith: String,

    /// A tag and value, of the form <tag-name>:<tag-value>, whose value is <tag-value>. Tag filters are case-insensitive.
    #[arg(long, default_value = "")]
    pub tag_exact: String,

    /// Name of a tag which must be present on the DNS record. Tag filters are case-insensitive.
    #[arg(long, default_value = "")]
    pub tag_present: String,

    /// A tag and value, of the form <tag-name>:<tag-value>, whose value starts with <tag-value>. Tag filters are case-insensitive.
    #[arg(long, default_value = "")]
    pub tag_startswith: String,

    /// Whether to match all tag search requirements or at least one (any). Allowed values: any, all
    #[arg(long, default_value = "all")]
    pub tag_match: String,

    /// Record type. Allowed values: A, AAAA, CAA, CERT, CNAME, DNSKEY, DS, HTTPS, LOC, MX, NAPTR, NS, PTR, SMIMEA, SRV, SSHFP, SVCB, TLSA, TXT, URI
    #[arg(long = "type", default_value = "")]
    pub record_type: String,
}
