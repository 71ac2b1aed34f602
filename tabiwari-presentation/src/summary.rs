use std::fmt::Write;

use tabiwari_application::{
    BookingService, JournalService, LedgerService, MemberDirectory, ScheduleService, TripBook,
};

use crate::money_format::format_money;

const HIGHLIGHT_COUNT: usize = 4;

/// The whole trip on one page: header, day-by-day schedule, spending,
/// journal highlights. Text counterpart of the app's trip export.
pub struct SummaryPresenter;

impl SummaryPresenter {
    pub fn render(book: &TripBook) -> String {
        let mut output = String::new();

        let config = &book.config;
        let _ = writeln!(&mut output, "{}", config.trip_name);
        let _ = writeln!(
            &mut output,
            "{} | {} ({} days)",
            config.region, config.start_date, config.duration_days
        );
        if !book.members.is_empty() {
            let names: Vec<&str> = book
                .members
                .iter()
                .map(|member| member.name.as_str())
                .collect();
            let _ = writeln!(&mut output, "With: {}", names.join(", "));
        }

        let _ = writeln!(&mut output, "\n## Schedule");
        let dates = ScheduleService::day_dates(config);
        for (day_index, date) in dates.iter().enumerate() {
            let _ = writeln!(&mut output, "Day {} — {date}", day_index + 1);
            let items = ScheduleService::items_for_day(book, day_index as u32);
            if items.is_empty() {
                let _ = writeln!(&mut output, "  (free day)");
                continue;
            }
            for item in items {
                let _ = writeln!(&mut output, "  {}  {}  {}", item.time, item.title, item.location);
            }
        }

        let _ = writeln!(&mut output, "\n## Spending");
        let _ = writeln!(
            &mut output,
            "Total: {}",
            format_money(LedgerService::total_spent(book), &book.wallet.display_currency)
        );
        for stat in LedgerService::category_breakdown(book) {
            let _ = writeln!(
                &mut output,
                "  {}: {} ({}%)",
                stat.category,
                format_money(stat.total, &book.wallet.display_currency),
                stat.percent.round()
            );
        }
        if !book.bookings.is_empty() {
            let _ = writeln!(
                &mut output,
                "Booked ahead: {}",
                format_money(BookingService::total_cost(book), &book.wallet.display_currency)
            );
        }

        let highlights = JournalService::highlights(book, HIGHLIGHT_COUNT);
        if !highlights.is_empty() {
            let _ = writeln!(&mut output, "\n## Memories");
            for post in highlights {
                let author = book
                    .display_name(&post.author)
                    .unwrap_or_else(|| post.author.as_str());
                let _ = writeln!(&mut output, "  \"{}\" — {author}", post.content);
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tabiwari_application::Placement;
    use tabiwari_domain::{
        ExpenseRecord, ItemCategory, JournalPost, MemberId, Money, ScheduleItem, TripConfig,
        TripMember,
    };

    fn sample_book() -> TripBook {
        let mut book = TripBook::default();
        book.config = TripConfig {
            trip_name: "Tokyo Reunion".to_owned(),
            region: "Kanto".to_owned(),
            start_date: NaiveDate::from_ymd_opt(2024, 10, 12).expect("valid date"),
            duration_days: 2,
        };
        book.members.push(TripMember {
            id: MemberId::new("a"),
            name: "Alice".to_owned(),
            avatar: String::new(),
        });
        ScheduleService::upsert_item(
            &mut book,
            ScheduleItem {
                id: "s1".to_owned(),
                day_index: 0,
                time: "09:15".to_owned(),
                title: "Narita Express".to_owned(),
                location: "Narita".to_owned(),
                category: ItemCategory::Transport,
                notes: None,
                photo: None,
                distance_info: None,
            },
            Placement::Day(0),
        );
        let pivot_currency = book.wallet.rates.pivot().clone();
        LedgerService::upsert_expense(
            &mut book,
            ExpenseRecord {
                id: "e1".to_owned(),
                title: "Ramen".to_owned(),
                category: "Food".to_owned(),
                amount: Money::from_i64(1920),
                currency: pivot_currency,
                payer: MemberId::new("a"),
                participants: vec![MemberId::new("a")],
                settled: Default::default(),
                date: NaiveDate::from_ymd_opt(2024, 10, 12).expect("valid date"),
            },
        )
        .expect("valid expense");
        JournalService::add_post(
            &mut book,
            JournalPost {
                id: "j1".to_owned(),
                author: MemberId::new("a"),
                content: "Best ramen of my life".to_owned(),
                image_url: None,
                date: NaiveDate::from_ymd_opt(2024, 10, 12).expect("valid date"),
            },
        )
        .expect("valid post");
        book
    }

    #[test]
    fn summary_covers_every_section() {
        let summary = SummaryPresenter::render(&sample_book());

        assert!(summary.contains("Tokyo Reunion"));
        assert!(summary.contains("Day 1 — 2024-10-12"));
        assert!(summary.contains("09:15  Narita Express  Narita"));
        assert!(summary.contains("Day 2"));
        assert!(summary.contains("(free day)"));
        // 1920 JPY at 19.2 JPY/HKD.
        assert!(summary.contains("Total: HKD 100"));
        assert!(summary.contains("Food: HKD 100 (100%)"));
        assert!(summary.contains("\"Best ramen of my life\" — Alice"));
    }

    #[test]
    fn empty_book_still_renders_a_header() {
        let summary = SummaryPresenter::render(&TripBook::default());
        assert!(summary.contains("Ohana Trip"));
        assert!(summary.contains("## Spending"));
        assert!(summary.contains("Total: HKD 0"));
    }
}
