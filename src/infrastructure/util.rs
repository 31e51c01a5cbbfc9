use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Transliterates with `deunicode` and folds to `[a-z0-9-]`.
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
