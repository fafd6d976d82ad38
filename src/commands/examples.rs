use wordnik::options::ExamplesOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "examples", description = "get example usages of a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "the max # of examples")]
    limit: Option<u32>,

    #[argh(option, description = "the # of examples to skip")]
    skip: Option<u32>,

    #[argh(switch, description = "include duplicate examples")]
    include_duplicates: bool,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let examples = client
        .examples(
            &options.word,
            &ExamplesOptions {
                include_duplicates: super::flag(options.include_duplicates),
                use_canonical: super::flag(options.canonical),
                skip: options.skip,
                limit: options.limit,
            },
        )
        .await?;

    super::print_value(&examples)
}
