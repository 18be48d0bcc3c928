use larder_core::{FilterOptions, Group, NewRecipe, RecipeCard};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Recipe card as served by `/recipes`
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDto {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub meal_type: Option<String>,
    pub dietary_preference: Option<String>,
    /// Minutes; absent when unknown
    pub total_time: Option<u32>,
    pub is_favorite: bool,
    /// Unix timestamp in milliseconds
    pub created_at: Option<i64>,
    pub group_ids: Vec<i64>,
}

impl From<RecipeCard> for RecipeDto {
    fn from(recipe: RecipeCard) -> Self {
        RecipeDto {
            id: recipe.id,
            name: recipe.name,
            category: recipe.category,
            meal_type: recipe.meal_type,
            dietary_preference: recipe.dietary_preference,
            total_time: recipe.total_time,
            is_favorite: recipe.is_favorite,
            created_at: recipe.created_at,
            group_ids: recipe.group_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeDto {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub meal_type: Option<String>,
    #[serde(default)]
    pub dietary_preference: Option<String>,
    #[serde(default)]
    pub total_time: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub group_ids: Vec<i64>,
}

impl From<CreateRecipeDto> for NewRecipe {
    fn from(dto: CreateRecipeDto) -> Self {
        NewRecipe {
            name: dto.name,
            category: dto.category,
            meal_type: dto.meal_type,
            dietary_preference: dto.dietary_preference,
            total_time: dto.total_time,
            is_favorite: dto.is_favorite,
            group_ids: dto.group_ids,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FavoriteDto {
    pub favorite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GroupDto {
    pub id: i64,
    pub name: String,
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        GroupDto {
            id: group.id,
            name: group.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateGroupDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FilterOptionDto {
    pub value: String,
    pub label: String,
}

/// Everything a filter panel offers, groups included
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptionsDto {
    pub categories: Vec<FilterOptionDto>,
    pub meal_types: Vec<FilterOptionDto>,
    pub dietary_preferences: Vec<FilterOptionDto>,
    pub groups: Vec<FilterOptionDto>,
}

impl From<FilterOptions> for FilterOptionsDto {
    fn from(options: FilterOptions) -> Self {
        let convert = |values: Vec<larder_core::options::FilterOption>| -> Vec<FilterOptionDto> {
            values
                .into_iter()
                .map(|o| FilterOptionDto {
                    value: o.value,
                    label: o.label,
                })
                .collect()
        };

        FilterOptionsDto {
            categories: convert(options.categories),
            meal_types: convert(options.meal_types),
            dietary_preferences: convert(options.dietary_preferences),
            groups: convert(options.groups),
        }
    }
}
