pub mod app;
pub mod header;
pub mod history_screen;
pub mod login_screen;
pub mod profile_screen;
pub mod report_screen;
pub mod ticket_list;
pub mod tickets_page;

pub use app::App;
pub use header::Header;
pub use history_screen::HistoryScreen;
pub use login_screen::LoginScreen;
pub use profile_screen::ProfileScreen;
pub use report_screen::ReportScreen;
pub use ticket_list::TicketList;
pub use tickets_page::TicketsPage;
