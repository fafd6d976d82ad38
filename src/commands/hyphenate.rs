use wordnik::options::HyphenationOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "hyphenate", description = "split a word into syllables")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "only use this dictionary")]
    source_dictionary: Option<String>,

    #[argh(option, description = "the max # of results")]
    limit: Option<u32>,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let hyphenation = client
        .hyphenation(
            &options.word,
            &HyphenationOptions {
                use_canonical: super::flag(options.canonical),
                source_dictionary: options.source_dictionary,
                limit: options.limit,
            },
        )
        .await?;

    super::print_value(&hyphenation)
}
