use wordnik::options::TopExampleOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(
    subcommand,
    name = "top-example",
    description = "get the best example usage of a word"
)]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let example = client
        .top_example(
            &options.word,
            &TopExampleOptions {
                use_canonical: super::flag(options.canonical),
            },
        )
        .await?;

    super::print_value(&example)
}
