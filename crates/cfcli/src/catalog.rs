//! Command catalog
//!
//! Maps each network verb to a method, a path template and the options its
//! flags feed. The handler adds the security option.
//!
//! | verb      | method | path                                             |
//! |-----------|--------|--------------------------------------------------|
//! | list      | GET    | `/zones/{zone_id}/dns_records`                   |
//! | create    | POST   | `/zones/{zone_id}/dns_records`                   |
//! | export    | GET    | `/zones/{zone_id}/dns_records/export`            |
//! | scan      | POST   | `/zones/{zone_id}/dns_records/scan`              |
//! | delete    | DELETE | `/zones/{zone_id}/dns_records/{dns_record_id}`   |
//! | details   | GET    | `/zones/{zone_id}/dns_records/{dns_record_id}`   |
//! | update    | PATCH  | `/zones/{zone_id}/dns_records/{dns_record_id}`   |
//! | overwrite | PATCH  | `/zones/{zone_id}/dns_records/{dns_record_id}`   |

use cfcli_core::request::{Method, RequestBuilder, RequestOption};
use cfcli_core::{ApiCommand, Result};
use serde_json::json;

use crate::cli::{
    Commands, ExistingRecord, ExistingRecordArgs, ListArgs, NewRecord, RecordArgs, RecordIdArgs,
    ZoneArgs,
};

pub const DNS_RECORDS: &str = "/zones/{zone_id}/dns_records";
pub const DNS_RECORDS_EXPORT: &str = "/zones/{zone_id}/dns_records/export";
pub const DNS_RECORDS_SCAN: &str = "/zones/{zone_id}/dns_records/scan";
pub const DNS_RECORD: &str = "/zones/{zone_id}/dns_records/{dns_record_id}";

/// Record subtype carried in the `type` body field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    Aaaa,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }
}

/// A network-calling invocation
#[derive(Debug, Clone)]
pub enum Endpoint {
    List(ListArgs),
    Create(RecordType, RecordArgs),
    Export(ZoneArgs),
    Scan(ZoneArgs),
    Delete(RecordIdArgs),
    Details(RecordIdArgs),
    Update(RecordType, ExistingRecordArgs),
    Overwrite(RecordType, ExistingRecordArgs),
}

impl Endpoint {
    /// The endpoint behind a parsed command; `None` for `setup`
    pub fn from_command(command: Commands) -> Option<Self> {
        let endpoint = match command {
            Commands::Setup(_) => return None,
            Commands::List(args) => Endpoint::List(args),
            Commands::Create { record } => match record {
                NewRecord::A(args) => Endpoint::Create(RecordType::A, args),
                NewRecord::Aaaa(args) => Endpoint::Create(RecordType::Aaaa, args),
            },
            Commands::Export(args) => Endpoint::Export(args),
            Commands::Scan(args) => Endpoint::Scan(args),
            Commands::Delete(args) => Endpoint::Delete(args),
            Commands::Details(args) => Endpoint::Details(args),
            Commands::Update { record } => {
                let (kind, args) = split_existing(record);
                Endpoint::Update(kind, args)
            }
            Commands::Overwrite { record } => {
                let (kind, args) = split_existing(record);
                Endpoint::Overwrite(kind, args)
            }
        };
        Some(endpoint)
    }
}

fn split_existing(record: ExistingRecord) -> (RecordType, ExistingRecordArgs) {
    match record {
        ExistingRecord::A(args) => (RecordType::A, args),
        ExistingRecord::Aaaa(args) => (RecordType::Aaaa, args),
    }
}

fn zone(zone_id: &str) -> RequestOption {
    RequestOption::path_parameter("zone_id", zone_id)
}

fn record(record_id: &str) -> RequestOption {
    RequestOption::path_parameter("dns_record_id", record_id)
}

fn record_body(kind: RecordType, args: &RecordArgs) -> Result<RequestOption> {
    RequestOption::json_body(&json!({
        "content": args.content,
        "name": args.name,
        "proxied": args.proxied,
        "type": kind.as_str(),
        "comment": args.comment,
        "tags": args.tags,
        "ttl": args.ttl,
    }))
}

fn list_filters(args: &ListArgs) -> RequestOption {
    RequestOption::query_parameters([
        ("comment.absent", args.comment_absent.clone()),
        ("comment.contains", args.comment_contains.clone()),
        ("comment.endswith", args.comment_endswith.clone()),
        ("comment.exact", args.comment_exact.clone()),
        ("comment.present", args.comment_present.clone()),
        ("comment.startswith", args.comment_startswith.clone()),
        ("content", args.content.clone()),
        ("direction", args.direction.clone()),
        ("match", args.match_.clone()),
        ("name", args.name.clone()),
        ("order", args.order.clone()),
        ("page", args.page.to_string()),
        ("per_page", args.per_page.to_string()),
        ("proxied", args.proxied.to_string()),
        ("search", args.search.clone()),
        ("tag", args.tag.clone()),
        ("tag.absent", args.tag_absent.clone()),
        ("tag.contains", args.tag_contains.clone()),
        ("tag.endswith", args.tag_endswith.clone()),
        ("tag.exact", args.tag_exact.clone()),
        ("tag.present", args.tag_present.clone()),
        ("tag.startswith", args.tag_startswith.clone()),
        ("tag_match", args.tag_match.clone()),
        ("type", args.record_type.clone()),
    ])
}

impl ApiCommand for Endpoint {
    fn name(&self) -> &'static str {
        match self {
            Endpoint::List(_) => "list",
            Endpoint::Create(..) => "create",
            Endpoint::Export(_) => "export",
            Endpoint::Scan(_) => "scan",
            Endpoint::Delete(_) => "delete",
            Endpoint::Details(_) => "details",
            Endpoint::Update(..) => "update",
            Endpoint::Overwrite(..) => "overwrite",
        }
    }

    fn request(&self) -> Result<RequestBuilder> {
        let builder = match self {
            Endpoint::List(args) => RequestBuilder::new(Method::Get, DNS_RECORDS)
                .option(zone(&args.zone_id))
                .option(list_filters(args)),
            Endpoint::Create(kind, args) => RequestBuilder::new(Method::Post, DNS_RECORDS)
                .option(zone(&args.zone_id))
                .option(record_body(*kind, args)?),
            Endpoint::Export(args) => {
                RequestBuilder::new(Method::Get, DNS_RECORDS_EXPORT).option(zone(&args.zone_id))
            }
            Endpoint::Scan(args) => {
                RequestBuilder::new(Method::Post, DNS_RECORDS_SCAN).option(zone(&args.zone_id))
            }
            Endpoint::Delete(args) => RequestBuilder::new(Method::Delete, DNS_RECORD)
                .option(zone(&args.zone_id))
                .option(record(&args.record_id)),
            Endpoint::Details(args) => RequestBuilder::new(Method::Get, DNS_RECORD)
                .option(zone(&args.zone_id))
                .option(record(&args.record_id)),
            Endpoint::Update(kind, args) | Endpoint::Overwrite(kind, args) => {
                RequestBuilder::new(Method::Patch, DNS_RECORD)
                    .option(zone(&args.record.zone_id))
                    .option(record(&args.record_id))
                    .option(record_body(*kind, &args.record)?)
            }
        };
        Ok(builder)
    }
}
