use wordnik::options::{
    RandomWordOptions,
    RandomWordsOptions,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "random", description = "get random words")]
pub(crate) struct Options {
    #[argh(
        option,
        description = "the # of words to get. if not set, one word is returned"
    )]
    count: Option<u32>,

    #[argh(switch, description = "only return words with a dictionary definition")]
    has_dictionary_def: bool,

    #[argh(
        option,
        description = "only return this part of speech. may be repeated"
    )]
    include_part_of_speech: Vec<String>,

    #[argh(option, description = "never return this part of speech. may be repeated")]
    exclude_part_of_speech: Vec<String>,

    #[argh(option, description = "the minimum word length")]
    min_length: Option<u32>,

    #[argh(option, description = "the maximum word length")]
    max_length: Option<i64>,

    #[argh(option, description = "sort by this field, like alpha or count")]
    sort_by: Option<String>,

    #[argh(option, description = "asc or desc")]
    sort_order: Option<String>,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let filter = RandomWordOptions {
        has_dictionary_def: super::flag(options.has_dictionary_def),
        include_part_of_speech: super::csv_list(options.include_part_of_speech),
        exclude_part_of_speech: super::csv_list(options.exclude_part_of_speech),
        min_length: options.min_length,
        max_length: options.max_length,
        ..Default::default()
    };

    let words = match options.count {
        Some(count) => {
            client
                .random_words(&RandomWordsOptions {
                    filter,
                    sort_by: options.sort_by,
                    sort_order: options.sort_order,
                    limit: Some(count),
                })
                .await?
        }
        None => client.random_word(&filter).await?,
    };

    super::print_value(&words)
}
