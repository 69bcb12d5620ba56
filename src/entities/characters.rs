use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    pub gender: String,

    pub species: String,

    /// Home planet, if known.
    pub planet_id: Option<i32>,

    pub starship_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planets::Entity",
        from = "Column::PlanetId",
        to = "super::planets::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Planets,
    #[sea_orm(
        belongs_to = "super::starships::Entity",
        from = "Column::StarshipId",
        to = "super::starships::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Starships,
    #[sea_orm(has_many = "super::favorite_characters::Entity")]
    FavoriteCharacters,
}

impl Related<super::planets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planets.def()
    }
}

impl Related<super::starships::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Starships.def()
    }
}

impl Related<super::favorite_characters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoriteCharacters.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
