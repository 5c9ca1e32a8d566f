mod auth_card;

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod signup;
pub use signup::SignupView;

mod password_reset;
pub use password_reset::PasswordResetView;

mod dashboard;
pub use dashboard::DashboardView;

mod ticket_detail;
pub use ticket_detail::TicketDetailModal;

mod new_ticket;
pub use new_ticket::NewTicketView;
