use wordnik::options::PronunciationsOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "pronounce", description = "get the pronunciations of a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(
        option,
        long = "type",
        description = "only include this format, like ahd-5 or arpabet"
    )]
    type_format: Option<String>,

    #[argh(option, description = "only use this dictionary")]
    source_dictionary: Option<String>,

    #[argh(option, description = "the max # of results")]
    limit: Option<u32>,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let pronunciations = client
        .pronunciations(
            &options.word,
            &PronunciationsOptions {
                use_canonical: super::flag(options.canonical),
                source_dictionary: options.source_dictionary,
                type_format: options.type_format,
                limit: options.limit,
            },
        )
        .await?;

    super::print_value(&pronunciations)
}
