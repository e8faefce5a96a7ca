/// Builds a `std::process::Command`, or appends more args
/// to an existing one.
///
/// # Examples
/// ```
/// use forgepush_utils::cmd;
///
/// let mut command = cmd!("echo", "hello");
/// cmd!(command, "world");
/// command.status().unwrap();
/// ```
#[macro_export]
macro_rules! cmd {
    ($program:literal $(, $arg:expr)* $(,)?) => {{
        let mut command = ::std::process::Command::new($program);
        $(command.arg($arg);)*
        command
    }};
    ($command:ident, $($arg:expr),+ $(,)?) => {
        $command$(.arg($arg))+
    };
}

/// Shorthand for `String::from`.
#[macro_export]
macro_rules! string {
    ($str:expr) => {
        ::std::string::String::from($str)
    };
}

/// Creates a `Vec<String>` from a list of string-like values.
#[macro_export]
macro_rules! string_vec {
    ($($str:expr),* $(,)?) => {
        vec![
            $($crate::string!($str),)*
        ]
    };
}
