/// Admin decisions on a pending request.
#[derive(Debug, Clone, Copy)]
pub enum RequestAction {
    Approve,
    Reject,
}
