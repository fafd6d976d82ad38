use wordnik::options::FrequencyOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "frequency",
    description = "get how often a word was used each year"
)]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "the first year")]
    start_year: Option<i32>,

    #[argh(option, description = "the last year")]
    end_year: Option<i32>,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let frequency = client
        .frequency(
            &options.word,
            &FrequencyOptions {
                use_canonical: super::flag(options.canonical),
                start_year: options.start_year,
                end_year: options.end_year,
            },
        )
        .await?;

    super::print_value(&frequency)
}
