use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "subjects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name_jp: Option<String>,
    pub name_cn: Option<String>,
    pub name_en: Option<String>,
    pub mal_id: Option<i32>,
    pub website: Option<String>,
    pub on_air_date: Option<DateTimeUtc>,
    /// Cover path fragment on the Bangumi image CDN, e.g. `9b/d6/120925_Zp040`.
    pub bgm_image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
