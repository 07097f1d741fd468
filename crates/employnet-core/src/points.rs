//! Points/currency conversion.
//!
//! The system-wide conversion rate is 100 points = $1, which makes one
//! point worth exactly one cent. All monetary amounts are stored as
//! integer cents; floating point never touches money.

/// Points awarded per dollar.
pub const POINTS_PER_DOLLAR: i64 = 100;

/// Points debited for a payout of the given amount in cents.
///
/// At 100 points per dollar, one point equals one cent, so the debit is
/// the cent amount itself.
pub fn points_for_cents(amount_cents: i64) -> i64 {
    amount_cents
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_dollar_costs_one_hundred_points() {
        assert_eq!(points_for_cents(POINTS_PER_DOLLAR), 100);
        assert_eq!(points_for_cents(1000), 1000);
    }
}
