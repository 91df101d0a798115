use crate::wire::wire_enum;

wire_enum! {
    pub enum PermissionType {
        User => "USER",
        Group => "GROUP",
        Company => "COMPANY",
        Anyone => "ANYONE",
    }
}

wire_enum! {
    pub enum PermissionRole {
        Read => "READ",
        Write => "WRITE",
        Owner => "OWNER",
    }
}
