pub use owo_colors::{OwoColorize, Stream};

/// Writes to STDOUT and flushes, exploding instead of panicking when STDOUT is gone.
#[macro_export]
macro_rules! show {
    ($($expression:expr),* $(,)?) => {{
        let mut stdout = ::std::io::stdout().lock();
        $(
            $crate::error::UnwrapOrExplode::unwrap_or_explode(
                ::std::io::Write::write_fmt(&mut stdout, ::std::format_args!("{}", $expression)),
                "failed to write to STDOUT",
            );
        )*
        $crate::error::UnwrapOrExplode::unwrap_or_explode(
            ::std::io::Write::flush(&mut stdout),
            "failed to flush STDOUT",
        );
    }};
}

#[macro_export]
macro_rules! showln {
    ($($expression:expr),* $(,)?) => {
        $crate::show!($($expression,)* "\n")
    };
}
