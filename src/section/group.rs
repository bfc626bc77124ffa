use super::Resource;

/// Resources sharing a group name.
#[derive(Debug, Clone)]
pub struct Group<'r, 'a> {
    identifier: Option<String>,
    resources: Vec<&'r Resource<'a>>,
}

impl<'r, 'a> Group<'r, 'a> {
    /// Start a group from its first resource; the group takes that resource's group name.
    pub fn new(resource: &'r Resource<'a>) -> Self {
        Self {
            identifier: resource.group_identifier().map(str::to_string),
            resources: vec![resource],
        }
    }

    pub fn identifier(&self) -> Option<&str> {
        self.identifier.as_deref()
    }

    /// Add a resource; adding one that is already a member does nothing.
    pub fn add_resource(&mut self, resource: &'r Resource<'a>) {
        if !self.resources.iter().any(|r| std::ptr::eq(*r, resource)) {
            self.resources.push(resource);
        }
    }

    pub fn resources(&self) -> &[&'r Resource<'a>] {
        &self.resources
    }

    /// `# Group <identifier>`, or nothing for an unnamed group.
    pub fn definition(&self) -> Option<String> {
        self.identifier.as_ref().map(|id| format!("# Group {id}"))
    }

    /// Partition resources into groups by group name, in order of first appearance.
    pub fn partition(resources: &[&'r Resource<'a>]) -> Vec<Self> {
        let mut groups: Vec<Self> = Vec::new();
        for &resource in resources {
            let identifier = resource.group_identifier();
            match groups.iter_mut().find(|g| g.identifier() == identifier) {
                Some(group) => group.add_resource(resource),
                None => groups.push(Self::new(resource)),
            }
        }
        groups
    }
}
