mod report;

pub use report::{CarSummary, DailyRow, PeriodRow, Report, ServiceLine};
