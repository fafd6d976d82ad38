mod audio;
mod define;
mod etymology;
mod examples;
mod frequency;
mod hyphenate;
mod phrases;
mod pronounce;
mod random;
mod related;
mod score;
mod top_example;
mod wotd;

use wordnik::{
    CsvList,
    Value,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand)]
pub(crate) enum SubCommand {
    Audio(self::audio::Options),
    Define(self::define::Options),
    Etymology(self::etymology::Options),
    Examples(self::examples::Options),
    Frequency(self::frequency::Options),
    Hyphenate(self::hyphenate::Options),
    Phrases(self::phrases::Options),
    Pronounce(self::pronounce::Options),
    Random(self::random::Options),
    Related(self::related::Options),
    Score(self::score::Options),
    TopExample(self::top_example::Options),
    Wotd(self::wotd::Options),
}

impl SubCommand {
    /// Run this command
    pub(crate) async fn exec(self, client: &wordnik::Client) -> anyhow::Result<()> {
        match self {
            Self::Audio(options) => self::audio::exec(client, options).await,
            Self::Define(options) => self::define::exec(client, options).await,
            Self::Etymology(options) => self::etymology::exec(client, options).await,
            Self::Examples(options) => self::examples::exec(client, options).await,
            Self::Frequency(options) => self::frequency::exec(client, options).await,
            Self::Hyphenate(options) => self::hyphenate::exec(client, options).await,
            Self::Phrases(options) => self::phrases::exec(client, options).await,
            Self::Pronounce(options) => self::pronounce::exec(client, options).await,
            Self::Random(options) => self::random::exec(client, options).await,
            Self::Related(options) => self::related::exec(client, options).await,
            Self::Score(options) => self::score::exec(client, options).await,
            Self::TopExample(options) => self::top_example::exec(client, options).await,
            Self::Wotd(options) => self::wotd::exec(client, options).await,
        }
    }
}

/// Print a value as pretty json to the stdout.
fn print_value(value: &Value) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    println!("{text}");
    Ok(())
}

/// Turn a repeated cli option into a list, or `None` if it was never passed.
fn csv_list(values: Vec<String>) -> Option<CsvList> {
    if values.is_empty() {
        return None;
    }

    Some(values.into())
}

/// Only send a flag if it was set.
fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}
