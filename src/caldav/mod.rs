pub mod mkcalendar;
pub mod query;
pub mod sharing;

pub use mkcalendar::MkCalendar;
pub use query::{CalendarQuery, ComponentFilter, TimeRange};
pub use sharing::{ShareInvitation, SharePrivilege};
