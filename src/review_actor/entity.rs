use crate::actor_framework::{Entity, FrameworkError};
use crate::domain::{is_valid_rating, Review, ReviewCreate, ReviewPatch};

fn check_rating(rating: u8) -> Result<u8, FrameworkError> {
    if is_valid_rating(rating) {
        Ok(rating)
    } else {
        Err(FrameworkError::Validation(format!("rating out of range: {rating}")))
    }
}

impl Entity for Review {
    type Id = String;
    type CreateParams = ReviewCreate;
    type Patch = ReviewPatch;
    type Action = ();
    type ActionResult = ();

    fn from_create_params(id: String, params: ReviewCreate) -> Result<Self, FrameworkError> {
        Ok(Self {
            id,
            product_id: params.product_id,
            user_id: params.user_id,
            rating: check_rating(params.rating)?,
            comment: params.comment,
        })
    }

    fn on_update(&mut self, patch: ReviewPatch) -> Result<(), FrameworkError> {
        self.rating = check_rating(patch.rating)?;
        self.comment = patch.comment;
        Ok(())
    }

    /// One review per user and product.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.product_id == other.product_id && self.user_id == other.user_id
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), FrameworkError> {
        Ok(())
    }
}
