use tabiwari_domain::{Booking, CurrencyConverter, MemberId, Money};

use crate::{error::BookingError, trip::TripBook};

/// Booking/voucher storage with search and per-member filtering.
pub struct BookingService;

impl BookingService {
    pub fn upsert(book: &mut TripBook, booking: Booking) -> Result<(), BookingError> {
        if let Some(member) = &booking.booked_by {
            if !book.is_member(member) {
                return Err(BookingError::UnknownMember {
                    member: member.clone(),
                });
            }
        }
        if let Some(existing) = book
            .bookings
            .iter_mut()
            .find(|candidate| candidate.id == booking.id)
        {
            *existing = booking;
        } else {
            book.bookings.push(booking);
        }
        Ok(())
    }

    pub fn remove(book: &mut TripBook, id: &str) -> bool {
        let before = book.bookings.len();
        book.bookings.retain(|booking| booking.id != id);
        book.bookings.len() != before
    }

    /// Case-insensitive search over title and reference number, optionally
    /// narrowed to one member's bookings. An empty term matches everything.
    pub fn search<'a>(
        book: &'a TripBook,
        term: &str,
        booked_by: Option<&MemberId>,
    ) -> Vec<&'a Booking> {
        let needle = term.trim().to_lowercase();
        book.bookings
            .iter()
            .filter(|booking| match booked_by {
                Some(member) => booking.booked_by.as_ref() == Some(member),
                None => true,
            })
            .filter(|booking| {
                if needle.is_empty() {
                    return true;
                }
                booking.title.to_lowercase().contains(&needle)
                    || booking
                        .reference_no
                        .as_deref()
                        .is_some_and(|reference| reference.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Sum of booking costs in the display currency. Costs are stored in
    /// pivot units.
    pub fn total_cost(book: &TripBook) -> Money {
        let total_pivot: Money = book.bookings.iter().map(|booking| booking.cost).sum();
        CurrencyConverter::convert(
            total_pivot,
            book.wallet.rates.pivot(),
            &book.wallet.display_currency,
            &book.wallet.rates,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tabiwari_domain::{BookingKind, TripMember};

    fn booking(id: &str, title: &str, reference: Option<&str>, by: Option<&str>) -> Booking {
        Booking {
            id: id.to_owned(),
            kind: BookingKind::Flight,
            title: title.to_owned(),
            reference_no: reference.map(str::to_owned),
            booked_by: by.map(MemberId::new),
            cost: Money::from_i64(1000),
            details: Default::default(),
            image_url: None,
        }
    }

    #[fixture]
    fn book() -> TripBook {
        let mut book = TripBook::default();
        book.members.push(TripMember {
            id: MemberId::new("a"),
            name: "Alice".to_owned(),
            avatar: String::new(),
        });
        BookingService::upsert(&mut book, booking("f1", "CX504 Pacific Air", Some("M7X9L2"), Some("a")))
            .expect("valid booking");
        BookingService::upsert(&mut book, booking("h1", "Shinjuku Prince Hotel", None, None))
            .expect("valid booking");
        book
    }

    #[rstest]
    fn unknown_booker_is_rejected(mut book: TripBook) {
        assert_eq!(
            BookingService::upsert(&mut book, booking("x", "Kart", None, Some("zz"))),
            Err(BookingError::UnknownMember {
                member: MemberId::new("zz")
            })
        );
    }

    #[rstest]
    #[case::by_title("prince", None, &["h1"])]
    #[case::by_reference("m7x9", None, &["f1"])]
    #[case::empty_term_matches_all("", None, &["f1", "h1"])]
    #[case::member_filter("", Some("a"), &["f1"])]
    #[case::no_match("ryokan", None, &[])]
    fn search_matches_title_and_reference(
        book: TripBook,
        #[case] term: &str,
        #[case] by: Option<&str>,
        #[case] expected: &[&str],
    ) {
        let by = by.map(MemberId::new);
        let found: Vec<&str> = BookingService::search(&book, term, by.as_ref())
            .iter()
            .map(|booking| booking.id.as_str())
            .collect();
        assert_eq!(found, expected);
    }

    #[rstest]
    fn total_cost_converts_to_display_currency(book: TripBook) {
        // 2000 JPY at 19.2 JPY/HKD.
        let total = BookingService::total_cost(&book);
        assert_eq!(
            total,
            Money::from_decimal(
                rust_decimal::Decimal::from(2000) / rust_decimal::Decimal::new(192, 1)
            )
        );
    }
}
