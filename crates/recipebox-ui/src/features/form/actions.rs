//! Form page intents that leave the page.

use crate::core::nav::Navigator;
use crate::core::routes::AppRoute;

/// Navigation requested from the form page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormIntent {
    /// Go to the recipe list.
    BackToList,
    /// Abandon the form and return to the previous page.
    Cancel,
}

/// Carry out `intent` through `navigator`.
pub fn handle_form_intent(intent: FormIntent, navigator: &impl Navigator) {
    match intent {
        FormIntent::BackToList => navigator.push(AppRoute::List),
        FormIntent::Cancel => navigator.back(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::nav::testing::{NavEvent, RecordingNavigator};

    #[test]
    fn leaving_the_form_navigates() {
        let navigator = RecordingNavigator::default();
        handle_form_intent(FormIntent::BackToList, &navigator);
        handle_form_intent(FormIntent::Cancel, &navigator);
        assert_eq!(
            navigator.events(),
            vec![NavEvent::Push(AppRoute::List), NavEvent::Back]
        );
    }
}
