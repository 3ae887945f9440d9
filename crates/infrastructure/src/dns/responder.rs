use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{Name, RData, Record};
use static_dns_domain::QueryOutcome;

/// Turns a selected outcome into answer records owned by `query_name`.
///
/// Returns `None` when the outcome carries no answer, in which case the
/// caller replies with a failure code instead of an empty NOERROR.
pub fn answer_records(outcome: QueryOutcome<'_>, query_name: &Name) -> Option<Vec<Record>> {
    match outcome {
        QueryOutcome::A { ttl, addresses } => Some(
            addresses
                .iter()
                .map(|addr| Record::from_rdata(query_name.clone(), ttl, RData::A(A(*addr))))
                .collect(),
        ),
        QueryOutcome::AAAA { ttl, addresses } => Some(
            addresses
                .iter()
                .map(|addr| Record::from_rdata(query_name.clone(), ttl, RData::AAAA(AAAA(*addr))))
                .collect(),
        ),
        QueryOutcome::Failed => None,
    }
}
