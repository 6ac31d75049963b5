use crate::core::book::AttendanceBook;
use crate::core::ledger::UpsertOutcome;
use crate::db::log::ttlog_or_warn;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::keys::DayKey;
use crate::models::record::Record;
use crate::ui::messages::{info, success};
use crate::utils::hm;

/// Field overrides typed on the command line; `None` keeps the stored value.
#[derive(Debug, Default, Clone, Copy)]
pub struct RecordPatch {
    pub overtime_minutes: Option<u32>,
    pub holiday_work_minutes: Option<u32>,
    pub paid_leave: Option<bool>,
}

impl RecordPatch {
    /// Start from `current` (the pre-filled form) and apply the overrides.
    pub fn apply_to(&self, current: Record) -> Record {
        Record {
            overtime_minutes: self.overtime_minutes.unwrap_or(current.overtime_minutes),
            holiday_work_minutes: self
                .holiday_work_minutes
                .unwrap_or(current.holiday_work_minutes),
            paid_leave: self.paid_leave.unwrap_or(current.paid_leave),
        }
    }
}

pub fn describe(record: &Record) -> String {
    let mut parts = Vec::new();
    if record.has_overtime() {
        parts.push(format!("overtime {}", hm(record.overtime_minutes)));
    }
    if record.has_holiday_work() {
        parts.push(format!("holiday work {}", hm(record.holiday_work_minutes)));
    }
    if record.paid_leave {
        parts.push("paid leave".to_string());
    }
    parts.join(", ")
}

/// High-level business logic for the `set` and `clear` commands.
pub struct SetLogic;

impl SetLogic {
    pub fn apply(
        book: &mut AttendanceBook<DbPool>,
        key: DayKey,
        patch: RecordPatch,
    ) -> AppResult<UpsertOutcome> {
        let current = book.ledger().get(&key).copied().unwrap_or_default();
        let record = patch.apply_to(current);

        let outcome = book.upsert(key, record)?;
        let target = key.to_string();

        match outcome {
            UpsertOutcome::Stored => {
                let what = describe(&record);
                success(format!("Saved {}: {}", key, what));
                ttlog_or_warn(&book.store().conn, "set", &target, &what);
            }
            UpsertOutcome::Removed => {
                if current.is_empty() {
                    info(format!("Nothing recorded for {}", key));
                } else {
                    success(format!("Cleared {}", key));
                    ttlog_or_warn(
                        &book.store().conn,
                        "clear",
                        &target,
                        &format!("was: {}", describe(&current)),
                    );
                }
            }
        }

        Ok(outcome)
    }

    pub fn clear(book: &mut AttendanceBook<DbPool>, key: DayKey) -> AppResult<UpsertOutcome> {
        let zero = RecordPatch {
            overtime_minutes: Some(0),
            holiday_work_minutes: Some(0),
            paid_leave: Some(false),
        };
        Self::apply(book, key, zero)
    }
}
