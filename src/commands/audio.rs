use wordnik::options::AudioOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "audio", description = "get audio files for a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "the max # of results")]
    limit: Option<u32>,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let audio = client
        .audio(
            &options.word,
            &AudioOptions {
                use_canonical: super::flag(options.canonical),
                limit: options.limit,
            },
        )
        .await?;

    super::print_value(&audio)
}
