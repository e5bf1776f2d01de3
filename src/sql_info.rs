use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use arrow::array::{
    ArrayBuilder, ArrayRef, BooleanBuilder, Int32Builder, Int64Builder, ListBuilder, MapBuilder,
    StringBuilder, UInt32Builder, UnionArray,
};
use arrow::buffer::ScalarBuffer;
use arrow::datatypes::{DataType, Field, Fields, Schema, SchemaRef, UnionFields, UnionMode};
use arrow::record_batch::RecordBatch;
use tonic::Status;

use crate::error::arrow_error_to_status;

// Dense union type codes of the SqlInfo value column. These are part of the
// wire contract; clients decode by code, not by child name.
const STRING_VALUE_TYPE_ID: i8 = 0;
const BOOL_VALUE_TYPE_ID: i8 = 1;
const BIGINT_VALUE_TYPE_ID: i8 = 2;
const INT_VALUE_TYPE_ID: i8 = 3;
const STRING_LIST_TYPE_ID: i8 = 4;
const INT32_TO_INT32_LIST_MAP_TYPE_ID: i8 = 5;

/// A value registered for a SqlInfo id. The closed set of shapes the
/// protocol permits; anything else is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlInfoValue {
    String(String),
    Bool(bool),
    BigInt(i64),
    Int32(i32),
    StringList(Vec<String>),
    Int32ToInt32ListMap(HashMap<i32, Vec<i32>>),
}

impl From<&str> for SqlInfoValue {
    fn from(value: &str) -> Self {
        SqlInfoValue::String(value.to_string())
    }
}

impl From<String> for SqlInfoValue {
    fn from(value: String) -> Self {
        SqlInfoValue::String(value)
    }
}

impl From<bool> for SqlInfoValue {
    fn from(value: bool) -> Self {
        SqlInfoValue::Bool(value)
    }
}

impl From<i64> for SqlInfoValue {
    fn from(value: i64) -> Self {
        SqlInfoValue::BigInt(value)
    }
}

impl From<i32> for SqlInfoValue {
    fn from(value: i32) -> Self {
        SqlInfoValue::Int32(value)
    }
}

impl From<Vec<String>> for SqlInfoValue {
    fn from(value: Vec<String>) -> Self {
        SqlInfoValue::StringList(value)
    }
}

impl From<&[&str]> for SqlInfoValue {
    fn from(value: &[&str]) -> Self {
        SqlInfoValue::StringList(value.iter().map(|s| s.to_string()).collect())
    }
}

impl From<HashMap<i32, Vec<i32>>> for SqlInfoValue {
    fn from(value: HashMap<i32, Vec<i32>>) -> Self {
        SqlInfoValue::Int32ToInt32ListMap(value)
    }
}

fn map_data_type() -> DataType {
    let entries = Field::new(
        "entries",
        DataType::Struct(Fields::from(vec![
            Field::new("keys", DataType::Int32, false),
            Field::new(
                "values",
                DataType::List(Arc::new(Field::new("item", DataType::Int32, true))),
                true,
            ),
        ])),
        false,
    );
    DataType::Map(Arc::new(entries), false)
}

fn union_fields() -> UnionFields {
    UnionFields::new(
        0_i8..6,
        vec![
            Field::new("string_value", DataType::Utf8, true),
            Field::new("bool_value", DataType::Boolean, true),
            Field::new("bigint_value", DataType::Int64, true),
            Field::new("int_value", DataType::Int32, true),
            Field::new(
                "string_list",
                DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
                true,
            ),
            Field::new("int32_to_int32_list_map", map_data_type(), true),
        ],
    )
}

/// Schema of the record streamed in response to a `CommandGetSqlInfo`:
/// `info_name: uint32 not null, value: dense_union<...>`.
pub fn sql_info_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new("info_name", DataType::UInt32, false),
        Field::new(
            "value",
            DataType::Union(union_fields(), UnionMode::Dense),
            true,
        ),
    ]))
}

/// Registered SqlInfo values, keyed by info id.
///
/// Registration is expected during server startup, but the map is guarded by
/// a read-write lock so late registration stays safe while requests are
/// being served concurrently.
#[derive(Debug, Default)]
pub struct SqlInfoRegistry {
    values: RwLock<HashMap<u32, SqlInfoValue>>,
}

impl SqlInfoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the value to return for a SqlInfo id, replacing any previous
    /// value for the same id.
    pub fn register(&self, id: u32, value: impl Into<SqlInfoValue>) {
        let mut values = self.values.write().expect("sql info registry poisoned");
        values.insert(id, value.into());
    }

    pub fn len(&self) -> usize {
        self.values.read().expect("sql info registry poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Build the two-column SqlInfo record for the requested ids, in request
    /// order. Fails with `NotFound` on the first id with no registered value.
    pub fn build_record(&self, ids: &[u32]) -> Result<RecordBatch, Status> {
        let values = self
            .values
            .read()
            .map_err(|_| Status::internal("sql info registry poisoned"))?;

        let mut info_name = UInt32Builder::new();
        let mut string_values = StringBuilder::new();
        let mut bool_values = BooleanBuilder::new();
        let mut bigint_values = Int64Builder::new();
        let mut int_values = Int32Builder::new();
        let mut string_lists = ListBuilder::new(StringBuilder::new());
        let mut map_values = MapBuilder::new(
            None,
            Int32Builder::new(),
            ListBuilder::new(Int32Builder::new()),
        );
        let mut type_ids: Vec<i8> = Vec::with_capacity(ids.len());
        let mut offsets: Vec<i32> = Vec::with_capacity(ids.len());

        for &id in ids {
            let value = values.get(&id).ok_or_else(|| {
                Status::not_found(format!("no information for sql info number {}", id))
            })?;
            info_name.append_value(id);
            match value {
                SqlInfoValue::String(v) => {
                    type_ids.push(STRING_VALUE_TYPE_ID);
                    offsets.push(string_values.len() as i32);
                    string_values.append_value(v);
                }
                SqlInfoValue::Bool(v) => {
                    type_ids.push(BOOL_VALUE_TYPE_ID);
                    offsets.push(bool_values.len() as i32);
                    bool_values.append_value(*v);
                }
                SqlInfoValue::BigInt(v) => {
                    type_ids.push(BIGINT_VALUE_TYPE_ID);
                    offsets.push(bigint_values.len() as i32);
                    bigint_values.append_value(*v);
                }
                SqlInfoValue::Int32(v) => {
                    type_ids.push(INT_VALUE_TYPE_ID);
                    offsets.push(int_values.len() as i32);
                    int_values.append_value(*v);
                }
                SqlInfoValue::StringList(items) => {
                    type_ids.push(STRING_LIST_TYPE_ID);
                    offsets.push(string_lists.len() as i32);
                    for item in items {
                        string_lists.values().append_value(item);
                    }
                    string_lists.append(true);
                }
                SqlInfoValue::Int32ToInt32ListMap(map) => {
                    type_ids.push(INT32_TO_INT32_LIST_MAP_TYPE_ID);
                    offsets.push(map_values.len() as i32);
                    // entries sorted by key so the encoding is deterministic
                    let mut keys: Vec<i32> = map.keys().copied().collect();
                    keys.sort_unstable();
                    for key in keys {
                        map_values.keys().append_value(key);
                        let lists = map_values.values();
                        for item in &map[&key] {
                            lists.values().append_value(*item);
                        }
                        lists.append(true);
                    }
                    map_values.append(true).map_err(arrow_error_to_status)?;
                }
            }
        }

        let children: Vec<ArrayRef> = vec![
            Arc::new(string_values.finish()),
            Arc::new(bool_values.finish()),
            Arc::new(bigint_values.finish()),
            Arc::new(int_values.finish()),
            Arc::new(string_lists.finish()),
            Arc::new(map_values.finish()),
        ];
        let value = UnionArray::try_new(
            union_fields(),
            ScalarBuffer::from(type_ids),
            Some(ScalarBuffer::from(offsets)),
            children,
        )
        .map_err(arrow_error_to_status)?;

        RecordBatch::try_new(
            sql_info_schema(),
            vec![Arc::new(info_name.finish()), Arc::new(value)],
        )
        .map_err(arrow_error_to_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, BooleanArray, Int32Array, Int64Array, StringArray, UInt32Array};

    fn registry() -> SqlInfoRegistry {
        let registry = SqlInfoRegistry::new();
        registry.register(1, "v1.0");
        registry.register(2, true);
        registry.register(3, 42_i64);
        registry.register(4, 7_i32);
        registry.register(5, vec!["a".to_string(), "b".to_string()]);
        let mut map = HashMap::new();
        map.insert(10, vec![1, 2, 3]);
        registry.register(6, map);
        registry
    }

    #[test]
    fn register_overwrites_prior_value() {
        let registry = SqlInfoRegistry::new();
        registry.register(1, "old");
        registry.register(1, "new");
        assert_eq!(registry.len(), 1);
        let record = registry.build_record(&[1]).unwrap();
        let value = record
            .column(1)
            .as_any()
            .downcast_ref::<UnionArray>()
            .unwrap();
        let strings = value
            .child(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(strings.value(0), "new");
    }

    #[test]
    fn record_has_requested_ids_in_order() {
        let registry = registry();
        let record = registry.build_record(&[5, 1, 3]).unwrap();
        assert_eq!(record.num_rows(), 3);
        let names = record
            .column(0)
            .as_any()
            .downcast_ref::<UInt32Array>()
            .unwrap();
        assert_eq!(names.values().as_ref(), &[5, 1, 3]);
        let value = record
            .column(1)
            .as_any()
            .downcast_ref::<UnionArray>()
            .unwrap();
        assert_eq!(value.type_id(0), STRING_LIST_TYPE_ID);
        assert_eq!(value.type_id(1), STRING_VALUE_TYPE_ID);
        assert_eq!(value.type_id(2), BIGINT_VALUE_TYPE_ID);
    }

    #[test]
    fn union_children_carry_the_registered_values() {
        let registry = registry();
        let record = registry.build_record(&[1, 2, 3, 4]).unwrap();
        let value = record
            .column(1)
            .as_any()
            .downcast_ref::<UnionArray>()
            .unwrap();
        let strings = value
            .child(STRING_VALUE_TYPE_ID)
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(strings.value(0), "v1.0");
        let bools = value
            .child(BOOL_VALUE_TYPE_ID)
            .as_any()
            .downcast_ref::<BooleanArray>()
            .unwrap();
        assert!(bools.value(0));
        let bigints = value
            .child(BIGINT_VALUE_TYPE_ID)
            .as_any()
            .downcast_ref::<Int64Array>()
            .unwrap();
        assert_eq!(bigints.value(0), 42);
        let ints = value
            .child(INT_VALUE_TYPE_ID)
            .as_any()
            .downcast_ref::<Int32Array>()
            .unwrap();
        assert_eq!(ints.value(0), 7);
    }

    #[test]
    fn record_schema_matches_the_published_schema() {
        let registry = registry();
        let record = registry.build_record(&[1, 2, 5, 6]).unwrap();
        assert_eq!(record.schema(), sql_info_schema());
    }

    #[test]
    fn unknown_id_is_not_found_and_names_the_id() {
        let registry = registry();
        let err = registry.build_record(&[1, 99]).unwrap_err();
        assert_eq!(err.code(), tonic::Code::NotFound);
        assert_eq!(err.message(), "no information for sql info number 99");
    }

    #[test]
    fn duplicate_ids_are_repeated_rows() {
        let registry = registry();
        let record = registry.build_record(&[2, 2]).unwrap();
        assert_eq!(record.num_rows(), 2);
        let value = record
            .column(1)
            .as_any()
            .downcast_ref::<UnionArray>()
            .unwrap();
        assert_eq!(value.type_id(0), BOOL_VALUE_TYPE_ID);
        assert_eq!(value.type_id(1), BOOL_VALUE_TYPE_ID);
        let bools = value
            .child(BOOL_VALUE_TYPE_ID)
            .as_any()
            .downcast_ref::<BooleanArray>()
            .unwrap();
        assert_eq!(bools.len(), 2);
    }
}
