//! Notifications derived from loan data.
//!
//! There is no notification endpoint. Members get notices computed from
//! their own loans; admins get one notice per pending loan request.

use api::{Loan, LoanStanding, LoanStatus};
use chrono::NaiveDate;

use crate::format;

/// Loans due within this many days raise a reminder.
pub const DUE_SOON_DAYS: i64 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NoticeKind {
    Warning,
    Reminder,
    Info,
}

impl NoticeKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Warning => "notice-warning",
            NoticeKind::Reminder => "notice-reminder",
            NoticeKind::Info => "notice-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    pub loan_id: u64,
}

fn title_of(loan: &Loan) -> &str {
    loan.book_title().unwrap_or("a book")
}

/// Notices for a member, most urgent first.
pub fn member_notices(loans: &[Loan], today: NaiveDate) -> Vec<Notice> {
    let mut notices: Vec<Notice> = loans
        .iter()
        .filter_map(|loan| member_notice(loan, today))
        .collect();
    notices.sort_by_key(|n| n.kind);
    notices
}

fn member_notice(loan: &Loan, today: NaiveDate) -> Option<Notice> {
    let book = title_of(loan);
    let (kind, title, message) = match &loan.status {
        LoanStatus::Pending => (
            NoticeKind::Info,
            "Loan request pending",
            format!("Your request to borrow \"{book}\" is waiting for approval."),
        ),
        LoanStatus::Rejected => {
            let reason = loan
                .rejection_reason
                .as_deref()
                .filter(|r| !r.trim().is_empty())
                .map(|r| format!(" Reason: {r}"))
                .unwrap_or_default();
            (
                NoticeKind::Warning,
                "Loan request rejected",
                format!("Your request to borrow \"{book}\" was rejected.{reason}"),
            )
        }
        LoanStatus::Returned => return None,
        _ => match loan.standing(today) {
            LoanStanding::Returned => return None,
            LoanStanding::Overdue => (
                NoticeKind::Warning,
                "Loan overdue",
                format!(
                    "\"{book}\" was due on {}. Please return it as soon as possible.",
                    format::date(loan.due_at)
                ),
            ),
            LoanStanding::Active => {
                let days = loan.days_until_due(today)?;
                if days > DUE_SOON_DAYS {
                    return None;
                }
                let when = match days {
                    0 => "today".to_string(),
                    1 => "tomorrow".to_string(),
                    n => format!("in {n} days"),
                };
                (
                    NoticeKind::Reminder,
                    "Return reminder",
                    format!("\"{book}\" is due {when}."),
                )
            }
        },
    };
    Some(Notice {
        kind,
        title: title.to_string(),
        message,
        loan_id: loan.id,
    })
}

/// Notices for an admin: every loan waiting for a decision.
pub fn admin_notices(pending: &[Loan]) -> Vec<Notice> {
    pending
        .iter()
        .map(|loan| Notice {
            kind: NoticeKind::Info,
            title: "New loan request".to_string(),
            message: format!(
                "{} wants to borrow \"{}\".",
                loan.member_name().unwrap_or("A member"),
                title_of(loan)
            ),
            loan_id: loan.id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::BookRef;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn loan(id: u64, status: LoanStatus, due: Option<NaiveDate>) -> Loan {
        Loan {
            id,
            status,
            due_at: due,
            book: Some(BookRef {
                title: format!("Book {id}"),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_member_notices() {
        let today = day(3, 10);
        let loans = vec![
            loan(1, LoanStatus::Pending, None),
            loan(2, LoanStatus::Borrowed, Some(day(3, 11))),
            loan(3, LoanStatus::Borrowed, Some(day(3, 1))),
            loan(4, LoanStatus::Borrowed, Some(day(4, 1))),
            loan(5, LoanStatus::Returned, Some(day(3, 1))),
            Loan {
                rejection_reason: Some("Out of stock".into()),
                ..loan(6, LoanStatus::Rejected, None)
            },
        ];
        let notices = member_notices(&loans, today);
        let ids: Vec<u64> = notices.iter().map(|n| n.loan_id).collect();
        assert_eq!(ids, vec![3, 6, 2, 1]);
        assert!(notices[1].message.ends_with("Reason: Out of stock"));
        assert_eq!(notices[2].message, "\"Book 2\" is due tomorrow.");
    }

    #[test]
    fn test_due_today_is_a_reminder() {
        let notices = member_notices(&[loan(1, LoanStatus::Borrowed, Some(day(3, 10)))], day(3, 10));
        assert_eq!(notices[0].kind, NoticeKind::Reminder);
        assert!(notices[0].message.contains("today"));
    }

    #[test]
    fn test_admin_notices() {
        let pending = vec![Loan {
            member_name: Some("Sari".into()),
            ..loan(9, LoanStatus::Pending, None)
        }];
        let notices = admin_notices(&pending);
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Sari wants to borrow \"Book 9\".");
    }
}
