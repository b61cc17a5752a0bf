mod actor;
