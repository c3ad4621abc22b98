/// Browser console logging for component code.
///
/// Each line is prefixed with `js_sys::Date::now()` and a `[link]` tag. These
/// only work on wasm32; code that also runs natively logs through `tracing`.
#[doc(hidden)]
#[macro_export]
macro_rules! __console_line {
    ($level:ident, $($arg:tt)*) => {
        gloo_console::$level!(format!("[{}] [link] {}", js_sys::Date::now(), format!($($arg)*)))
    };
}

#[macro_export]
macro_rules! console_info {
    ($($arg:tt)*) => {
        $crate::__console_line!(info, $($arg)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($($arg:tt)*) => {
        $crate::__console_line!(debug, $($arg)*)
    };
}
