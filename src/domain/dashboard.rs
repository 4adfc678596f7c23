use std::collections::HashSet;

use rust_decimal::Decimal;

use super::{CustomRequest, PaymentRecord, PaymentStatus, RequestStatus};

/// Headline numbers for the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardStats {
    /// Sum of verified payments only.
    pub total_sales: Decimal,
    /// Every payment record, whatever its status.
    pub total_orders: usize,
    pub pending_payments: usize,
    pub verified_payments: usize,
    pub rejected_payments: usize,
    /// Distinct users with at least one payment record.
    pub customer_count: usize,
    pub product_count: usize,
    pub category_count: usize,
    pub open_requests: usize,
}

impl DashboardStats {
    pub fn compute(
        payments: &[PaymentRecord],
        requests: &[CustomRequest],
        product_count: usize,
        category_count: usize,
    ) -> Self {
        let mut stats = Self {
            total_orders: payments.len(),
            product_count,
            category_count,
            open_requests: requests
                .iter()
                .filter(|request| request.status == RequestStatus::Pending)
                .count(),
            ..Self::default()
        };
        for payment in payments {
            match payment.status {
                PaymentStatus::Pending => stats.pending_payments += 1,
                PaymentStatus::Verified => {
                    stats.verified_payments += 1;
                    stats.total_sales += payment.amount;
                }
                PaymentStatus::Rejected => stats.rejected_payments += 1,
            }
        }
        stats.customer_count = payments
            .iter()
            .map(|payment| payment.user_id.as_str())
            .collect::<HashSet<_>>()
            .len();
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn payment(id: &str, user_id: &str, amount: Decimal, status: PaymentStatus) -> PaymentRecord {
        PaymentRecord {
            id: id.into(),
            user_id: user_id.into(),
            user_email: format!("{user_id}@example.com"),
            transaction_id: format!("TX-{id}"),
            amount,
            items: Vec::new(),
            status,
        }
    }

    #[test]
    fn test_only_verified_payments_count_as_sales() {
        let payments = vec![
            payment("1", "alice", dec!(500), PaymentStatus::Verified),
            payment("2", "alice", dec!(1500), PaymentStatus::Pending),
            payment("3", "bob", dec!(80), PaymentStatus::Rejected),
            payment("4", "bob", dec!(350), PaymentStatus::Verified),
        ];
        let requests = vec![CustomRequest {
            id: "request_1".into(),
            name: "Dana".into(),
            email: "dana@example.com".into(),
            description: "A portrait".into(),
            status: RequestStatus::Pending,
        }];

        let stats = DashboardStats::compute(&payments, &requests, 7, 2);
        assert_eq!(stats.total_sales, dec!(850));
        assert_eq!(stats.total_orders, 4);
        assert_eq!((stats.pending_payments, stats.verified_payments, stats.rejected_payments), (1, 2, 1));
        assert_eq!(stats.customer_count, 2);
        assert_eq!((stats.product_count, stats.category_count, stats.open_requests), (7, 2, 1));
    }

    #[test]
    fn test_empty_store() {
        assert_eq!(DashboardStats::compute(&[], &[], 0, 0), DashboardStats::default());
    }
}
