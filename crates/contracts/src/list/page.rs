use serde::{Deserialize, Serialize};

/// Метаданные пагинации, которые бэкенд прикладывает к каждой странице
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Номер страницы (нумерация с единицы)
    pub page: u64,
    /// Размер страницы
    pub limit: u64,
    /// Всего записей в выборке
    pub total_items: u64,
    /// Всего страниц (0, если выборка пуста)
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: u64, limit: u64, total_items: u64) -> Self {
        let limit = limit.max(1);
        let total_pages = (total_items + limit - 1) / limit;
        Self {
            page,
            limit,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Страница данных: элементы плюс метаданные одной выборки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_rounds_pages_up() {
        let meta = PageMeta::new(1, 20, 45);
        assert_eq!(meta.total_pages, 3);
        assert!(meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_meta_exact_multiple() {
        let meta = PageMeta::new(2, 20, 40);
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next);
        assert!(meta.has_prev);
    }

    #[test]
    fn test_meta_empty_collection() {
        let meta = PageMeta::new(1, 20, 0);
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next);
        assert!(!meta.has_prev);
    }

    #[test]
    fn test_envelope_wire_shape() {
        let json = r#"{"items":[1,2,3],"page":2,"limit":3,"totalItems":7,"totalPages":3,"hasNext":true,"hasPrev":true}"#;
        let page: Page<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.meta, PageMeta::new(2, 3, 7));
    }
}
