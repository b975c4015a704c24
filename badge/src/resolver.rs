use crate::badge::Badge;
use crate::color::Color;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum ResolveError {
    #[error("could not convert input to badge: {0}")]
    Mapping(#[source] BoxError),
}

/// Maps an optional upstream entity into a badge.
///
/// An absent input, or a mapper that yields no value, produces the fallback
/// badge. A mapper failure is never turned into a best-effort badge; it is
/// surfaced as [`ResolveError::Mapping`].
#[derive(Clone, Copy, Debug)]
pub struct Resolver<'a> {
    title: &'a str,
    color: Color,
    fallback_value: &'a str,
    fallback_color: Color,
}

impl<'a> Resolver<'a> {
    pub fn new(title: &'a str, fallback_value: &'a str) -> Self {
        Resolver {
            title,
            color: Color::Default,
            fallback_value,
            fallback_color: Color::Fallback,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn fallback_color(mut self, color: Color) -> Self {
        self.fallback_color = color;
        self
    }

    pub fn resolve<I, F, E>(&self, input: Option<I>, mapper: F) -> Result<Badge, ResolveError>
    where
        F: FnOnce(I) -> Result<Option<String>, E>,
        E: Into<BoxError>,
    {
        let color = self.color;
        self.resolve_with(input, |input| {
            mapper(input).map(|value| value.map(|value| (value, color)))
        })
    }

    pub fn resolve_infallible<I, F>(&self, input: Option<I>, mapper: F) -> Badge
    where
        F: FnOnce(I) -> Option<String>,
    {
        match input.and_then(mapper) {
            Some(value) => Badge::new(self.title, value, self.color),
            None => self.fallback(),
        }
    }

    /// Like [`Resolver::resolve`], but the mapper picks the color too.
    pub fn resolve_with<I, F, E>(&self, input: Option<I>, mapper: F) -> Result<Badge, ResolveError>
    where
        F: FnOnce(I) -> Result<Option<(String, Color)>, E>,
        E: Into<BoxError>,
    {
        let mapped = match input {
            Some(input) => mapper(input).map_err(|e| ResolveError::Mapping(e.into()))?,
            None => None,
        };

        Ok(match mapped {
            Some((value, color)) => Badge::new(self.title, value, color),
            None => self.fallback(),
        })
    }

    pub fn fallback(&self) -> Badge {
        Badge::new(self.title, self.fallback_value, self.fallback_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::convert::Infallible;

    #[test]
    fn test_present_input() {
        let badge = Resolver::new("stars", "no such project")
            .resolve_infallible(Some(42u64), |stars| Some(stars.to_string()));
        assert_eq!(badge, Badge::new("stars", "42", Color::Default));
    }

    #[test]
    fn test_absent_input() {
        let badge = Resolver::new("stars", "no such project")
            .resolve_infallible(None::<u64>, |stars| Some(stars.to_string()));
        assert_eq!(badge, Badge::new("stars", "no such project", Color::Fallback));
    }

    #[test]
    fn test_mapper_without_value_falls_back() {
        let badge = Resolver::new("license", "no such project")
            .fallback_color(Color::Warning)
            .resolve_infallible(Some(()), |_| None);
        assert_eq!(badge, Badge::new("license", "no such project", Color::Warning));
    }

    #[test]
    fn test_mapper_failure_is_propagated() {
        let result = Resolver::new("stars", "no such project")
            .resolve(Some("not a number"), |s| s.parse::<u64>().map(|n| Some(n.to_string())));

        let err = result.unwrap_err();
        assert!(matches!(err, ResolveError::Mapping(_)));
        assert!(err.to_string().starts_with("could not convert input to badge"));
    }

    #[test]
    fn test_mapper_failure_on_absent_input_is_not_invoked() {
        let result = Resolver::new("stars", "no such project")
            .resolve(None::<&str>, |_| Err::<Option<String>, _>("boom"));
        assert_eq!(
            result.unwrap(),
            Badge::new("stars", "no such project", Color::Fallback)
        );
    }

    #[test]
    fn test_custom_main_color() {
        let badge = Resolver::new("build", "unknown")
            .color(Color::Success)
            .resolve_infallible(Some("passing"), |s| Some(s.to_string()));
        assert_eq!(badge, Badge::new("build", "passing", Color::Success));
    }

    #[test]
    fn test_resolve_with_picks_color() {
        let resolver = Resolver::new("hireable", "no such user");
        let hireable = |hireable: bool| {
            Ok::<_, Infallible>(Some(if hireable {
                ("yes".to_string(), Color::Success)
            } else {
                ("no".to_string(), Color::Failure)
            }))
        };

        assert_eq!(
            resolver.resolve_with(Some(true), hireable).unwrap(),
            Badge::new("hireable", "yes", Color::Success)
        );
        assert_eq!(
            resolver.resolve_with(Some(false), hireable).unwrap(),
            Badge::new("hireable", "no", Color::Failure)
        );
    }

    proptest! {
        #[test]
        fn prop_absent_input_yields_fallback(
            title in ".{0,20}",
            fallback in ".{0,20}",
            color_index in 0usize..Color::ALL.len(),
        ) {
            let fallback_color = Color::ALL[color_index];
            let badge = Resolver::new(&title, &fallback)
                .fallback_color(fallback_color)
                .resolve_infallible(None::<String>, Some);
            prop_assert_eq!(badge, Badge::new(title.clone(), fallback.clone(), fallback_color));
        }

        #[test]
        fn prop_present_value_yields_main_color(
            title in ".{0,20}",
            value in ".{1,20}",
            color_index in 0usize..Color::ALL.len(),
        ) {
            let color = Color::ALL[color_index];
            let badge = Resolver::new(&title, "fallback")
                .color(color)
                .resolve_infallible(Some(value.clone()), Some);
            prop_assert_eq!(badge, Badge::new(title.clone(), value.clone(), color));
        }
    }
}
