use crate::form::Form;

/// The three screens and their paths. Anything unrecognized falls back to
/// the login screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    ForgotPassword,
}

impl Route {
    pub fn resolve(path: &str) -> Route {
        match path {
            "/login" => Route::Login,
            "/signup" => Route::Register,
            "/forgotPassword" => Route::ForgotPassword,
            _ => Route::Login,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/signup",
            Route::ForgotPassword => "/forgotPassword",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Route::Login => "Log In",
            Route::Register => "Create Account",
            Route::ForgotPassword => "Password Reset",
        }
    }

    pub fn mount(self) -> Form {
        match self {
            Route::Login => Form::login(),
            Route::Register => Form::register(),
            Route::ForgotPassword => Form::forgot_password(),
        }
    }
}
