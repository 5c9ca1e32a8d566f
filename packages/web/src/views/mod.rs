mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod password;
pub use password::Password;

mod protected;
pub use protected::Protected;

mod dashboard;
pub use dashboard::Dashboard;

mod new_ticket;
pub use new_ticket::NewTicket;
