#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "score", description = "get the scrabble score of a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let score = client.scrabble_score(&options.word).await?;
    super::print_value(&score)
}
