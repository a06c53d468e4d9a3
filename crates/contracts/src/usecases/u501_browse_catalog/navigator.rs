//! Навигация по витрине: категории -> подкатегории -> сетка товаров.

use crate::domain::a001_product::{Catalog, Product, ProductId, PLACEHOLDER_IMAGE};

/// Откуда взялась сетка товаров
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridOrigin {
    Category(String),
    Subcategory {
        category: String,
        subcategory: String,
    },
    Search(String),
}

/// Активный экран. Экраны взаимоисключающие.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Categories,
    Subcategories {
        category: String,
        subcategories: Vec<String>,
    },
    Grid {
        origin: GridOrigin,
        products: Vec<ProductId>,
    },
}

/// Карточка категории на стартовом экране
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub image: String,
}

/// Непустые категории каталога в порядке первого появления
pub fn categories(catalog: &Catalog) -> Vec<CategoryCard> {
    let mut cards: Vec<CategoryCard> = Vec::new();
    for product in catalog.products() {
        if product.category.is_empty() || cards.iter().any(|c| c.name == product.category) {
            continue;
        }
        cards.push(CategoryCard {
            name: product.category.clone(),
            image: product.cover_image().to_string(),
        });
    }
    cards
}

/// Подкатегории категории: без повторов, в порядке первого появления
pub fn subcategories_of(catalog: &Catalog, category: &str) -> Vec<String> {
    let mut subcategories: Vec<String> = Vec::new();
    for product in in_category(catalog, category) {
        if !product.subcategory.is_empty() && !subcategories.contains(&product.subcategory) {
            subcategories.push(product.subcategory.clone());
        }
    }
    subcategories
}

/// Картинка карточки подкатегории: первая картинка первого подходящего товара
pub fn subcategory_cover(catalog: &Catalog, category: &str, subcategory: &str) -> String {
    catalog
        .products()
        .iter()
        .find(|p| p.category == category && p.subcategory == subcategory)
        .map(|p| p.cover_image().to_string())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

/// Название для карточки: первая буква заглавная
pub fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Глобальный поиск без учёта регистра по названию, описаниям, sku и категориям
pub fn search_products(catalog: &Catalog, query: &str) -> Vec<ProductId> {
    let needle = query.trim().to_lowercase();
    catalog
        .products()
        .iter()
        .filter(|p| p.search_text().contains(&needle))
        .map(|p| p.id.clone())
        .collect()
}

fn in_category<'a>(catalog: &'a Catalog, category: &'a str) -> impl Iterator<Item = &'a Product> {
    catalog
        .products()
        .iter()
        .filter(move |p| p.category == category)
}

/// Машина состояний экранов витрины
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    screen: Screen,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn is_home(&self) -> bool {
        self.screen == Screen::Categories
    }

    /// Категория с подкатегориями открывает их список, иначе сразу сетку
    pub fn select_category(&mut self, catalog: &Catalog, category: &str) -> &Screen {
        let subcategories = subcategories_of(catalog, category);
        self.screen = if subcategories.is_empty() {
            Screen::Grid {
                origin: GridOrigin::Category(category.to_string()),
                products: in_category(catalog, category).map(|p| p.id.clone()).collect(),
            }
        } else {
            Screen::Subcategories {
                category: category.to_string(),
                subcategories,
            }
        };
        &self.screen
    }

    pub fn select_subcategory(
        &mut self,
        catalog: &Catalog,
        category: &str,
        subcategory: &str,
    ) -> &Screen {
        let products = in_category(catalog, category)
            .filter(|p| p.subcategory == subcategory)
            .map(|p| p.id.clone())
            .collect();
        self.screen = Screen::Grid {
            origin: GridOrigin::Subcategory {
                category: category.to_string(),
                subcategory: subcategory.to_string(),
            },
            products,
        };
        &self.screen
    }

    /// Пустой запрос возвращает к категориям; поиск не ограничен текущей категорией
    pub fn search(&mut self, catalog: &Catalog, query: &str) -> &Screen {
        let query = query.trim();
        self.screen = if query.is_empty() {
            Screen::Categories
        } else {
            Screen::Grid {
                origin: GridOrigin::Search(query.to_string()),
                products: search_products(catalog, query),
            }
        };
        &self.screen
    }

    /// "Volver" всегда ведёт на экран категорий
    pub fn back(&mut self) -> &Screen {
        self.screen = Screen::Categories;
        &self.screen
    }

    /// Товары текущей сетки (пусто на других экранах)
    pub fn grid_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        match &self.screen {
            Screen::Grid { products, .. } => products
                .iter()
                .filter_map(|id| catalog.get(id.as_str()))
                .collect(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, title: &str, category: &str, subcategory: &str) -> Product {
        let mut p = Product::new(id, title, 10.0);
        p.category = category.to_string();
        p.subcategory = subcategory.to_string();
        p
    }

    fn catalog() -> Catalog {
        let mut described = product("4", "Lámpara", "Hogar", "");
        described.long_description = "Ideal para tu WIDGET de escritorio".to_string();
        Catalog::new(vec![
            product("1", "Remera roja", "Ropa", "red"),
            product("2", "Remera azul", "Ropa", "blue"),
            product("3", "Buzo rojo", "Ropa", "red"),
            described,
            product("5", "Widget", "Juguetes", ""),
            product("6", "Sin categoría", "", ""),
        ])
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_categories_first_seen_and_non_empty() {
        let names: Vec<String> = categories(&catalog()).into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Ropa", "Hogar", "Juguetes"]);
    }

    #[test]
    fn test_category_with_subcategories_lists_them_deduplicated() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        let screen = nav.select_category(&catalog, "Ropa").clone();
        assert_eq!(
            screen,
            Screen::Subcategories {
                category: "Ropa".to_string(),
                subcategories: vec!["red".to_string(), "blue".to_string()],
            }
        );
        assert!(nav.grid_products(&catalog).is_empty());
    }

    #[test]
    fn test_category_without_subcategories_goes_to_grid() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.select_category(&catalog, "Hogar");
        assert_eq!(ids(&nav.grid_products(&catalog)), vec!["4"]);
        assert!(!nav.is_home());
    }

    #[test]
    fn test_subcategory_filters_by_pair() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.select_category(&catalog, "Ropa");
        nav.select_subcategory(&catalog, "Ropa", "red");
        assert_eq!(ids(&nav.grid_products(&catalog)), vec!["1", "3"]);
    }

    #[test]
    fn test_search_is_global_and_case_insensitive() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.select_category(&catalog, "Ropa");
        nav.search(&catalog, "  widget ");
        assert_eq!(ids(&nav.grid_products(&catalog)), vec!["4", "5"]);
        match nav.screen() {
            Screen::Grid { origin, .. } => {
                assert_eq!(origin, &GridOrigin::Search("widget".to_string()))
            }
            other => panic!("unexpected screen {other:?}"),
        }
    }

    #[test]
    fn test_search_matches_category_and_subcategory_text() {
        let catalog = catalog();
        assert_eq!(search_products(&catalog, "BLUE"), vec![ProductId::from("2")]);
        assert_eq!(search_products(&catalog, "juguetes"), vec![ProductId::from("5")]);
        assert!(search_products(&catalog, "inexistente").is_empty());
    }

    #[test]
    fn test_empty_search_and_back_return_home() {
        let catalog = catalog();
        let mut nav = Navigator::new();
        nav.search(&catalog, "remera");
        assert_eq!(nav.search(&catalog, "   "), &Screen::Categories);

        nav.select_category(&catalog, "Ropa");
        nav.select_subcategory(&catalog, "Ropa", "blue");
        assert_eq!(nav.back(), &Screen::Categories);
        assert!(nav.is_home());
    }

    #[test]
    fn test_display_name_and_cover() {
        assert_eq!(display_name("red"), "Red");
        assert_eq!(display_name("ñandú"), "Ñandú");
        assert_eq!(display_name(""), "");
        let catalog = catalog();
        assert_eq!(subcategory_cover(&catalog, "Ropa", "blue"), PLACEHOLDER_IMAGE);
        assert_eq!(subcategory_cover(&catalog, "Ropa", "green"), PLACEHOLDER_IMAGE);
    }
}
