use slotmap::new_key_type;

new_key_type! {
    pub struct IndividualKey;
    pub struct FamilyKey;
}
