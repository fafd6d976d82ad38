use wordnik::{
    options::RelatedWordsOptions,
    Value,
};

#[derive(Debug, argh::FromArgs)]
#[argh(subcommand, name = "related", description = "get words related to a word")]
pub(crate) struct Options {
    #[argh(positional, description = "the word")]
    word: String,

    #[argh(
        option,
        long = "type",
        description = "the relationship, like synonym, antonym, rhyme, hypernym, hyponym, or equivalent"
    )]
    relationship_type: Option<String>,

    #[argh(option, description = "the max # of words per relationship")]
    limit: Option<u32>,
}

pub(crate) async fn exec(client: &wordnik::Client, options: Options) -> anyhow::Result<()> {
    let word = options.word.as_str();
    let limit = options.limit;

    let words = match options.relationship_type.as_deref() {
        Some("synonym") => client.synonyms(word, limit).await?,
        Some("antonym") => client.antonyms(word, limit).await?,
        Some("rhyme") => client.rhymes(word, limit).await?,
        Some("hypernym") => client.hypernyms(word, limit).await?,
        Some("hyponym") => client.hyponyms(word, limit).await?,
        Some("equivalent") => client.equivalents(word, limit).await?,
        relationship_type => {
            let related = client
                .related_words(
                    word,
                    &RelatedWordsOptions {
                        relationship_types: relationship_type.map(Into::into),
                        limit_per_relationship_type: limit,
                        ..Default::default()
                    },
                )
                .await?;
            return super::print_value(&related);
        }
    };

    if words.is_empty() {
        eprintln!("No Results");
    }

    super::print_value(&Value::Array(words.into_iter().map(Value::from).collect()))
}
