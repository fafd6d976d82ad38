use wordnik::options::EtymologiesOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "etymology", description = "get the origin of a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let etymologies = client
        .etymologies(
            &options.word,
            &EtymologiesOptions {
                use_canonical: super::flag(options.canonical),
            },
        )
        .await?;

    super::print_value(&etymologies)
}
