//! Headline metrics for the summary cards and the rider-type donut.

use crate::views::{RentalTotals, RiderShare};
use bikeshare_core::category::RiderType;
use bikeshare_core::RawRecord;

/// Sum `count`, `casual` and `registered` over `records`.
///
/// The dashboard passes the date-filtered records here, so these are the
/// only figures that react to the date picker.
pub fn rental_totals<'a, I>(records: I) -> RentalTotals
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    records
        .into_iter()
        .fold(RentalTotals::default(), |mut totals, r| {
            totals.count += r.count;
            totals.casual += r.casual;
            totals.registered += r.registered;
            totals
        })
}

/// Casual vs registered riders over `records`, always two rows, casual first.
pub fn rider_share<'a, I>(records: I) -> Vec<RiderShare>
where
    I: IntoIterator<Item = &'a RawRecord>,
{
    let totals = rental_totals(records);
    RiderType::ORDER
        .into_iter()
        .map(|rider_type| RiderShare {
            rider_type,
            count: match rider_type {
                RiderType::Casual => totals.casual,
                RiderType::Registered => totals.registered,
            },
        })
        .collect()
}
