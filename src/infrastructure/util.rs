// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Hello, Wörld!"), "hello-world");
    }
}
