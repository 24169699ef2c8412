// Logging shims. Every event goes to the `pillnav_adapter` target; without the `tracing`
// feature the arguments are dropped unevaluated.

#[cfg(feature = "tracing")]
macro_rules! log_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::$level!(target: "pillnav_adapter", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! log_event {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! vtrace {
    ($($tt:tt)*) => { log_event!(trace, $($tt)*) };
}

macro_rules! vdebug {
    ($($tt:tt)*) => { log_event!(debug, $($tt)*) };
}

macro_rules! vwarn {
    ($($tt:tt)*) => { log_event!(warn, $($tt)*) };
}
