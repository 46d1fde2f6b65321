//! Favorite entity <-> model mapper

use stand_core::entities::{Favorite, FavoriteDetails, StandRef, UserRef};

use crate::models::{FavoriteDetailsModel, FavoriteModel};

impl From<FavoriteModel> for Favorite {
    fn from(model: FavoriteModel) -> Self {
        Favorite {
            id: model.id,
            user_id: model.user_id,
            stand_id: model.stand_id,
            created_at: model.created_at,
        }
    }
}

impl From<FavoriteDetailsModel> for FavoriteDetails {
    fn from(model: FavoriteDetailsModel) -> Self {
        let user = match (model.user_ref_id, model.user_handle, model.user_avatar) {
            (Some(id), Some(handle), Some(avatar)) => Some(UserRef { id, handle, avatar }),
            _ => None,
        };
        let stand = match (model.stand_ref_id, model.stand_name, model.stand_avatar) {
            (Some(id), Some(name), Some(avatar)) => Some(StandRef { id, name, avatar }),
            _ => None,
        };

        FavoriteDetails {
            favorite: model.favorite.into(),
            user,
            stand,
        }
    }
}
