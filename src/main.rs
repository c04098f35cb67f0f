mod colors;
mod decision;
mod dispatch;
mod error;

use std::{env, ffi::OsString};

use crate::{
    colors::{OwoColorize, Stream},
    dispatch::Mode,
    error::UnwrapOrExplode,
};

fn main() {
    let words = collect_words(env::args_os().skip(1)).unwrap_or_explode("arguments must be valid UTF-8");

    let answer = Mode::from_words(words.as_slice()).answer();
    showln!(answer.if_supports_color(Stream::Stdout, |answer| answer.colored()));
}

/// Every word goes to the dispatcher as is, `--` included.
fn collect_words(args: impl IntoIterator<Item = OsString>) -> Result<Vec<String>, OsString> {
    args.into_iter().map(OsString::into_string).collect()
}
