use wordnik::options::DefinitionsOptions;

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "define", description = "get the definitions of a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(option, description = "the max # of definitions")]
    limit: Option<u32>,

    #[argh(
        option,
        description = "only include this part of speech. may be repeated"
    )]
    part_of_speech: Vec<String>,

    #[argh(option, description = "only include this dictionary. may be repeated")]
    source_dictionary: Vec<String>,

    #[argh(switch, description = "include related words")]
    include_related: bool,

    #[argh(switch, description = "include tags")]
    include_tags: bool,

    #[argh(switch, description = "look up the canonical form of the word")]
    canonical: bool,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let definitions = client
        .definitions(
            &options.word,
            &DefinitionsOptions {
                limit: options.limit,
                part_of_speech: super::csv_list(options.part_of_speech),
                include_related: super::flag(options.include_related),
                source_dictionaries: super::csv_list(options.source_dictionary),
                use_canonical: super::flag(options.canonical),
                include_tags: super::flag(options.include_tags),
            },
        )
        .await?;

    if definitions
        .as_array()
        .is_some_and(|definitions| definitions.is_empty())
    {
        eprintln!("No definitions for \"{}\"", options.word);
    }

    super::print_value(&definitions)
}
