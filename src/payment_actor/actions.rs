/// Admin decisions on a pending payment.
#[derive(Debug, Clone, Copy)]
pub enum PaymentAction {
    Verify,
    Reject,
}
