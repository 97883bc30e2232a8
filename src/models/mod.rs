pub mod attachment;
pub mod auth;
pub mod report;
pub mod ticket;
pub mod user;

pub use attachment::Attachment;
pub use auth::{AvatarResponse, LoginRequest, LoginResponse, Session};
pub use report::{Report, ReportDto, ReporterRef, TicketRef};
pub use ticket::{filter_by_priority, NewTicket, Priority, Ticket, TicketDto, TicketStatus};
pub use user::{User, UserDto};
