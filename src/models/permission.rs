use std::collections::HashMap;

/// Runtime permissions the main screen asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    FineLocation,
    CoarseLocation,
    Camera,
    ReadExternalStorage,
    BodySensors,
}

/// Answer of the permission broker, one entry per requested permission
pub type PermissionGrants = HashMap<Permission, bool>;

impl Permission {
    pub fn android_name(&self) -> &'static str {
        match self {
            Permission::FineLocation => "android.permission.ACCESS_FINE_LOCATION",
            Permission::CoarseLocation => "android.permission.ACCESS_COARSE_LOCATION",
            Permission::Camera => "android.permission.CAMERA",
            Permission::ReadExternalStorage => "android.permission.READ_EXTERNAL_STORAGE",
            Permission::BodySensors => "android.permission.BODY_SENSORS",
        }
    }

    pub fn from_android_name(name: &str) -> Option<Self> {
        match name {
            "android.permission.ACCESS_FINE_LOCATION" => Some(Permission::FineLocation),
            "android.permission.ACCESS_COARSE_LOCATION" => Some(Permission::CoarseLocation),
            "android.permission.CAMERA" => Some(Permission::Camera),
            "android.permission.READ_EXTERNAL_STORAGE" => Some(Permission::ReadExternalStorage),
            "android.permission.BODY_SENSORS" => Some(Permission::BodySensors),
            _ => None,
        }
    }
}

/// Which flow a permission request belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionRequest {
    Location,
    Camera,
    Gallery,
    BodySensors,
}

impl PermissionRequest {
    pub fn permissions(&self) -> Vec<Permission> {
        match self {
            PermissionRequest::Location => vec![Permission::FineLocation, Permission::CoarseLocation],
            PermissionRequest::Camera => vec![Permission::Camera],
            PermissionRequest::Gallery => vec![Permission::ReadExternalStorage],
            PermissionRequest::BodySensors => vec![Permission::BodySensors],
        }
    }

    /// True if at least one permission of the request was granted
    pub fn is_satisfied_by(&self, grants: &PermissionGrants) -> bool {
        self.permissions()
            .iter()
            .any(|p| grants.get(p).copied().unwrap_or(false))
    }
}
