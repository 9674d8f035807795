mod home;
mod signin;
mod signup;

pub use home::Home;
pub use signin::SignIn;
pub use signup::SignUp;
