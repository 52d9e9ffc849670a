// SPDX-License-Identifier: MPL-2.0
use arcana::app::{self, Flags};
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        screen: args.opt_value_from_str("--screen").unwrap_or(None),
    };

    app::run(flags)
}
