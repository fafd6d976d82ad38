use time::{
    format_description::FormatItem,
    Date,
};
use wordnik::options::WordOfTheDayOptions;

const DATE_FORMAT: &[FormatItem<'_>] = time::macros::format_description!("[year]-[month]-[day]");

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, DATE_FORMAT).map_err(|error| format!("invalid date \"{value}\": {error}"))
}

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "wotd", description = "get the word of the day")]
pub(crate) struct Options {
    #[argh(
        option,
        from_str_fn(parse_date),
        description = "the day, as YYYY-MM-DD. defaults to today"
    )]
    date: Option<Date>,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let word_of_the_day = client
        .word_of_the_day(&WordOfTheDayOptions { date: options.date })
        .await?;

    match word_of_the_day {
        Some(word_of_the_day) => super::print_value(&word_of_the_day),
        None => {
            eprintln!("No word of the day");
            Ok(())
        }
    }
}
