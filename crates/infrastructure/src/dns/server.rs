use crate::dns::responder::answer_records;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use static_dns_domain::{RecordType, RoutingTable};
use std::sync::Arc;
use tracing::{debug, error};

/// Answers queries from the static routing table.
///
/// Names are matched exactly against the table. Unknown names get NXDOMAIN;
/// a known name without an address of the requested type gets SERVFAIL.
#[derive(Clone)]
pub struct RecordTableHandler {
    table: Arc<RoutingTable>,
}

impl RecordTableHandler {
    pub fn new(table: Arc<RoutingTable>) -> Self {
        Self { table }
    }
}

#[async_trait::async_trait]
impl RequestHandler for RecordTableHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query_name = request_info.query.original().name();
        // Display decodes punycode; table keys are the names as written on the wire.
        let name = query_name.to_ascii();
        let record_type = RecordType::from(u16::from(request_info.query.query_type()));
        let client = request.src();

        debug!(name = %name, record_type = %record_type, client = %client, "DNS query received");

        let Some(record_set) = self.table.lookup(&name) else {
            debug!(name = %name, "Name not in routing table (NXDOMAIN)");
            return send_error_response(request, &mut response_handle, ResponseCode::NXDomain)
                .await;
        };

        let outcome = record_set.select(record_type);
        let answer_count = outcome.answer_count();
        let Some(answers) = answer_records(outcome, query_name) else {
            debug!(name = %name, record_type = %record_type, "No usable answer (SERVFAIL)");
            return send_error_response(request, &mut response_handle, ResponseCode::ServFail)
                .await;
        };

        debug!(name = %name, answers = answer_count, "Sending response");

        let builder = MessageResponseBuilder::from_message_request(request);
        let header = response_header(request, ResponseCode::NoError);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        match response_handle.send_response(response).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

fn response_header(request: &Request, code: ResponseCode) -> Header {
    let mut header = Header::response_from_request(request.header());
    header.set_authoritative(true);
    header.set_response_code(code);
    header
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let header = response_header(request, code);
    let response = builder.build(header, &[] as &[Record], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
