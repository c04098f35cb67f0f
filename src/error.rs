use owo_colors::{OwoColorize, Stream};

pub trait UnwrapOrExplode<T> {
    fn unwrap_or_explode(self, message: &str) -> T;
}

impl<T, E> UnwrapOrExplode<T> for Result<T, E> {
    fn unwrap_or_explode(self, message: &str) -> T {
        match self {
            Ok(inner) => inner,
            Err(_) => explode_error(message),
        }
    }
}

// Goes to STDERR, STDOUT might be the thing that broke.
fn explode_error(message: &str) -> ! {
    eprintln!(
        "{}: {message}",
        "Error".if_supports_color(Stream::Stderr, |text| text.red()),
    );
    std::process::exit(1)
}
