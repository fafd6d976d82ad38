use wordnik::options::PhrasesOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "phrases", description = "get phrases containing a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "the max # of phrases")]
    limit: Option<u32>,

    #[argh(option, description = "the minimum weighted mutual info")]
    wlmi: Option<u32>,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let phrases = client
        .phrases(
            &options.word,
            &PhrasesOptions {
                limit: options.limit,
                wlmi: options.wlmi,
                use_canonical: super::flag(options.canonical),
            },
        )
        .await?;

    super::print_value(&phrases)
}
