//-----------------------------------------------------------------------------
// Fee Schedule
//-----------------------------------------------------------------------------
//
// Pure salary-band arithmetic. Contributions rise with salary while the
// payout percentage falls with it; the inversion is deliberate
// redistribution policy, not a bug.
//
// The tier constants are frozen: `contribution_amount` is derived from them
// once at registration and stored, and existing employees are never
// recomputed.

/// Monthly contribution for salaries up to 2000.
pub const TIER_1_CONTRIBUTION: i128 = 10;
/// Monthly contribution for salaries up to 5000.
pub const TIER_2_CONTRIBUTION: i128 = 25;
/// Monthly contribution for salaries up to 10000.
pub const TIER_3_CONTRIBUTION: i128 = 50;
/// Monthly contribution for all higher salaries.
pub const TIER_4_CONTRIBUTION: i128 = 100;

/// Upper bound of the first salary band, inclusive.
pub const BAND_1_MAX: i128 = 2_000;
/// Upper bound of the second salary band, inclusive.
pub const BAND_2_MAX: i128 = 5_000;
/// Upper bound of the third salary band, inclusive.
pub const BAND_3_MAX: i128 = 10_000;

/// Returns the required monthly contribution for a salary.
///
/// Total over all non-negative salaries; a fixed amount per band.
pub fn contribution_for(salary: i128) -> i128 {
    if salary <= BAND_1_MAX {
        TIER_1_CONTRIBUTION
    } else if salary <= BAND_2_MAX {
        TIER_2_CONTRIBUTION
    } else if salary <= BAND_3_MAX {
        TIER_3_CONTRIBUTION
    } else {
        TIER_4_CONTRIBUTION
    }
}

/// Returns the one-time claim payout for a salary.
///
/// 50% / 40% / 30% / 20% of salary over the same bands as
/// [`contribution_for`], integer division.
pub fn payout_for(salary: i128) -> i128 {
    if salary <= BAND_1_MAX {
        salary * 50 / 100
    } else if salary <= BAND_2_MAX {
        salary * 40 / 100
    } else if salary <= BAND_3_MAX {
        salary * 30 / 100
    } else {
        salary * 20 / 100
    }
}
