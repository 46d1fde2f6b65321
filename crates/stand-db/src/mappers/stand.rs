//! Stand entity <-> model mapper

use stand_core::entities::Stand;

use crate::models::StandModel;

impl From<StandModel> for Stand {
    fn from(model: StandModel) -> Self {
        Stand {
            id: model.id,
            name: model.name,
            slug: model.slug,
            avatar: model.avatar,
            location: model.location.map(|json| json.0),
            hours_of_op: model.hours_of_op.0,
            ratings_average: model.ratings_average,
            ratings_quantity: model.ratings_quantity,
            owner_id: model.owner_id,
            menu: model.menu.0,
            description: model.description,
            active: model.active,
            created_at: model.created_at,
        }
    }
}
